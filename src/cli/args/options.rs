use clap::ValueEnum;
use omnibox::{Browser, Disposition, Surface};

/// Surfaces selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SurfaceArg {
    Webpage,
    Chromium,
    Firefox,
}

impl SurfaceArg {
    /// Return the identifier consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SurfaceArg::Webpage => "webpage",
            SurfaceArg::Chromium => "chromium",
            SurfaceArg::Firefox => "firefox",
        }
    }
}

/// Parse a surface identifier as written in configuration files.
pub(crate) fn parse_surface(value: &str) -> Option<Surface> {
    let arg = SurfaceArg::from_str(value.trim(), true).ok()?;
    Some(match arg {
        SurfaceArg::Webpage => Surface::Webpage,
        SurfaceArg::Chromium => Surface::Extension(Browser::Chromium),
        SurfaceArg::Firefox => Surface::Extension(Browser::Firefox),
    })
}

/// Navigation dispositions accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DispositionArg {
    CurrentTab,
    NewForegroundTab,
    NewBackgroundTab,
}

impl From<DispositionArg> for Disposition {
    fn from(value: DispositionArg) -> Self {
        match value {
            DispositionArg::CurrentTab => Disposition::CurrentTab,
            DispositionArg::NewForegroundTab => Disposition::NewForegroundTab,
            DispositionArg::NewBackgroundTab => Disposition::NewBackgroundTab,
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
