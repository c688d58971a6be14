//! Runtime detection for Node.js and npm

use crate::error::GeneratorError;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Fail before any install when npm is not on the PATH.
/// Node.js availability is reported alongside but is advisory.
pub fn check_package_manager() -> Result<Vec<RuntimeInfo>, GeneratorError> {
    let node = check_node();
    let npm = check_npm();

    if !npm.available {
        return Err(GeneratorError::Subprocess {
            command: "npm --version".to_string(),
            reason: "npm not found on PATH (install from https://nodejs.org)".to_string(),
        });
    }

    Ok(vec![node, npm])
}
