//! Host configuration.

use boundary_core::Variant;
use boundary_ffi::BoundaryEnum;
use thiserror::Error;

/// Largest buffer the host will allocate.
pub const MAX_CAPACITY: usize = 4096;

/// Errors in host configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested buffer exceeds [`MAX_CAPACITY`].
    #[error("capacity {capacity} exceeds maximum of {max}")]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Variant argument could not be parsed.
    #[error("invalid variant '{input}': expected one, two, three or raw:<u32>")]
    InvalidVariant {
        /// The rejected argument.
        input: String,
    },
}

/// Output format for the host report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line, like the C host.
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    /// Parses a format name, falling back to text for anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Configuration for one host run.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Capacity of the caller-owned buffer.
    pub capacity: usize,

    /// Discriminant passed to the enum classifier. May be out of domain.
    pub discriminant: BoundaryEnum,

    /// How to print the report.
    pub format: OutputFormat,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            discriminant: Variant::Two.discriminant(),
            format: OutputFormat::Text,
        }
    }
}

impl HostConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buffer capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the discriminant to classify.
    #[must_use]
    pub const fn discriminant(mut self, discriminant: BoundaryEnum) -> Self {
        self.discriminant = discriminant;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks the configuration before any buffer is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Parses a variant argument: a name, or `raw:<u32>` for any discriminant.
pub fn parse_discriminant(input: &str) -> Result<BoundaryEnum, ConfigError> {
    if let Some(raw) = input.strip_prefix("raw:") {
        return raw.parse().map_err(|_| ConfigError::InvalidVariant {
            input: input.to_string(),
        });
    }

    input
        .parse::<Variant>()
        .map(u32::from)
        .map_err(|_| ConfigError::InvalidVariant {
            input: input.to_string(),
        })
}
