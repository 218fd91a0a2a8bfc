//! Script-backed providers
//!
//! This is where untrusted source text enters the provider system. The text
//! is compiled by `shortl-script`, which evaluates it in a scope containing
//! nothing but the URL parameter; the host process, filesystem, and network
//! are unreachable from a script. What this module adds on top is the result
//! contract: a script may evaluate to an integer, but a provider must
//! produce a string, and anything else is rejected at dispatch time.

use async_trait::async_trait;
use shortl_script::{Program, Value};

use crate::error::{Error, Result};
use crate::provider::Provider;

/// A custom provider compiled from source text.
///
/// ```
/// use shortl_core::ScriptProvider;
///
/// let provider = ScriptProvider::compile("fn f(url) { \"x-\" + url }")?;
/// assert_eq!(provider.fn_name(), "f");
/// # Ok::<(), shortl_core::Error>(())
/// ```
#[derive(Debug)]
pub struct ScriptProvider {
    program: Program,
}

impl ScriptProvider {
    /// Compile source text into a provider.
    ///
    /// Fails if the text does not define exactly one single-parameter
    /// function.
    pub fn compile(source: &str) -> Result<Self> {
        let program = Program::compile(source)?;
        Ok(Self { program })
    }

    /// The function name the source defined, used as the intrinsic
    /// provider name.
    pub fn fn_name(&self) -> &str {
        self.program.name()
    }
}

#[async_trait]
impl Provider for ScriptProvider {
    fn name(&self) -> Option<&str> {
        Some(self.program.name())
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        match self.program.eval(url)? {
            Value::Str(short) => Ok(short),
            other => Err(Error::NotAString {
                provider: self.program.name().to_string(),
                got: other.type_name(),
            }),
        }
    }
}
