use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{DomainError, DomainResult, PickupCode};
use crate::infrastructure::traits::PickupCodeSource;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Deterministic pickup codes: hands out the given codes in order, then starts over.
#[derive(Debug, Clone)]
pub struct ScriptedCodeSource {
    codes: Vec<PickupCode>,
    next: usize,
}

impl ScriptedCodeSource {
    pub fn new(codes: &[&str]) -> DomainResult<Self> {
        if codes.is_empty() {
            return Err(DomainError::InvalidPickupCode(String::new()));
        }
        let codes = codes
            .iter()
            .map(|code| PickupCode::new(*code))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { codes, next: 0 })
    }
}

impl PickupCodeSource for ScriptedCodeSource {
    fn next_code(&mut self) -> PickupCode {
        let code = self.codes[self.next % self.codes.len()].clone();
        self.next += 1;
        code
    }
}

// test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedCodeSource::new(&["AAAAAA", "BBBBBB"]).unwrap();
        let codes: Vec<_> = (0..3).map(|_| source.next_code().to_string()).collect();
        assert_eq!(codes, ["AAAAAA", "BBBBBB", "AAAAAA"]);
    }

    #[test]
    fn scripted_source_rejects_bad_codes() {
        assert!(ScriptedCodeSource::new(&[]).is_err());
        assert!(ScriptedCodeSource::new(&["abc"]).is_err());
    }
}
