use clap::ValueEnum;
use wayfarer_types::{CountryStatus, Transportation};

/// Output rendering mode for the report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// CLI-facing country status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    None,
    Visited,
    Wishlist,
}

impl From<StatusArg> for CountryStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::None => CountryStatus::None,
            StatusArg::Visited => CountryStatus::Visited,
            StatusArg::Wishlist => CountryStatus::Wishlist,
        }
    }
}

/// CLI-facing transportation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    Plane,
    Train,
    Car,
    Bus,
}

impl From<TransportArg> for Transportation {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Plane => Transportation::Plane,
            TransportArg::Train => Transportation::Train,
            TransportArg::Car => Transportation::Car,
            TransportArg::Bus => Transportation::Bus,
        }
    }
}
