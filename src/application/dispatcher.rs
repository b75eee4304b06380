//! Turns raw invocations into typed commands and runs them on the engine.
//!
//! Action names and their arities live in [`ACTIONS`]; argument validation is
//! driven from that table rather than repeated per action.

use crate::application::engine::WorkflowEngine;
use crate::error::{Result, TradeFinanceError};
use std::collections::HashMap;
use tracing::debug;

/// Side-channel key whose value replaces the payload of a successful
/// mutating action.
pub const RESULT_OVERRIDE_KEY: &str = "result";

/// Arity metadata for one action. `arity` counts the action name itself.
#[derive(Debug, Clone, Copy)]
pub struct ActionSpec {
    pub name: &'static str,
    pub arity: usize,
    pub usage: &'static str,
}

pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        name: "query",
        arity: 2,
        usage: "function followed by reference number",
    },
    ActionSpec {
        name: "delete",
        arity: 2,
        usage: "function followed by reference number",
    },
    ActionSpec {
        name: "inspect",
        arity: 4,
        usage: "function followed by reference number, exporter and shipping corporation",
    },
    ActionSpec {
        name: "ship",
        arity: 2,
        usage: "function followed by reference number",
    },
    ActionSpec {
        name: "present",
        arity: 3,
        usage: "function followed by reference number and negotiation bank",
    },
    ActionSpec {
        name: "arrival",
        arity: 3,
        usage: "function followed by reference number and import bank",
    },
    ActionSpec {
        name: "payment",
        arity: 2,
        usage: "function followed by reference number",
    },
];

/// A validated action with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query {
        reference: String,
    },
    Delete {
        reference: String,
    },
    Inspect {
        reference: String,
        exporter: String,
        shipping_corporation: String,
    },
    Ship {
        reference: String,
    },
    Present {
        reference: String,
        negotiation_bank: String,
    },
    Arrival {
        reference: String,
        import_bank: String,
    },
    Payment {
        reference: String,
    },
}

impl Command {
    /// Parses `[action, args...]` into a command.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(action) = args.first() else {
            return Err(TradeFinanceError::ArgumentCount {
                action: "invoke".to_string(),
                expected: "at least 2".to_string(),
                usage: "action followed by its arguments",
            });
        };

        let spec = ACTIONS
            .iter()
            .find(|spec| spec.name == action.as_str())
            .ok_or_else(|| TradeFinanceError::UnknownAction(action.clone()))?;

        if args.len() != spec.arity {
            return Err(TradeFinanceError::ArgumentCount {
                action: spec.name.to_string(),
                expected: spec.arity.to_string(),
                usage: spec.usage,
            });
        }

        let arg = |i: usize| args[i].clone();
        let command = match spec.name {
            "query" => Command::Query { reference: arg(1) },
            "delete" => Command::Delete { reference: arg(1) },
            "inspect" => Command::Inspect {
                reference: arg(1),
                exporter: arg(2),
                shipping_corporation: arg(3),
            },
            "ship" => Command::Ship { reference: arg(1) },
            "present" => Command::Present {
                reference: arg(1),
                negotiation_bank: arg(2),
            },
            "arrival" => Command::Arrival {
                reference: arg(1),
                import_bank: arg(2),
            },
            "payment" => Command::Payment { reference: arg(1) },
            other => return Err(TradeFinanceError::UnknownAction(other.to_string())),
        };
        Ok(command)
    }

    pub fn action(&self) -> &'static str {
        match self {
            Command::Query { .. } => "query",
            Command::Delete { .. } => "delete",
            Command::Inspect { .. } => "inspect",
            Command::Ship { .. } => "ship",
            Command::Present { .. } => "present",
            Command::Arrival { .. } => "arrival",
            Command::Payment { .. } => "payment",
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            Command::Query { reference }
            | Command::Delete { reference }
            | Command::Inspect { reference, .. }
            | Command::Ship { reference }
            | Command::Present { reference, .. }
            | Command::Arrival { reference, .. }
            | Command::Payment { reference } => reference,
        }
    }

    /// Whether the command writes a new record, and therefore honours the
    /// result override.
    pub fn is_transition(&self) -> bool {
        !matches!(self, Command::Query { .. } | Command::Delete { .. })
    }
}

/// An inbound call as delivered by the transport.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
    /// Named side-channel data accompanying the call.
    pub transient: HashMap<String, Vec<u8>>,
}

impl Invocation {
    pub fn invoke<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: "invoke".to_string(),
            args: args.into_iter().map(Into::into).collect(),
            transient: HashMap::new(),
        }
    }

    pub fn with_transient(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.transient.insert(key.into(), value.into());
        self
    }
}

/// Successful result of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// What the operation itself produced.
    pub payload: Vec<u8>,
    /// Caller-supplied replacement for `payload`.
    pub override_payload: Option<Vec<u8>>,
}

impl Outcome {
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            override_payload: None,
        }
    }

    /// The bytes returned to the caller.
    pub fn body(&self) -> &[u8] {
        self.override_payload.as_deref().unwrap_or(&self.payload)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.override_payload.unwrap_or(self.payload)
    }
}

pub struct Dispatcher {
    engine: WorkflowEngine,
}

impl Dispatcher {
    pub fn new(engine: WorkflowEngine) -> Self {
        Self { engine }
    }

    /// Initialisation hook; accepts no arguments.
    pub fn init(&self, args: &[String]) -> Result<Outcome> {
        if !args.is_empty() {
            return Err(TradeFinanceError::ArgumentCount {
                action: "init".to_string(),
                expected: "0".to_string(),
                usage: "init takes no arguments",
            });
        }
        Ok(Outcome::default())
    }

    pub async fn handle(&self, invocation: &Invocation) -> Result<Outcome> {
        match invocation.function.as_str() {
            "init" => self.init(&invocation.args),
            "invoke" => {
                let command = Command::parse(&invocation.args)?;
                let mut outcome = self.execute(&command).await?;
                if command.is_transition() {
                    outcome.override_payload =
                        invocation.transient.get(RESULT_OVERRIDE_KEY).cloned();
                }
                Ok(outcome)
            }
            other => Err(TradeFinanceError::UnknownFunction(other.to_string())),
        }
    }

    pub async fn execute(&self, command: &Command) -> Result<Outcome> {
        debug!(
            action = command.action(),
            reference = command.reference(),
            "dispatching"
        );
        let payload = match command {
            Command::Query { reference } => self.engine.query(reference).await?,
            Command::Delete { reference } => {
                self.engine.delete(reference).await?;
                Vec::new()
            }
            Command::Inspect {
                reference,
                exporter,
                shipping_corporation,
            } => {
                self.engine
                    .inspect(reference, exporter, shipping_corporation)
                    .await?;
                Vec::new()
            }
            Command::Ship { reference } => self.engine.ship(reference).await?,
            Command::Present {
                reference,
                negotiation_bank,
            } => self.engine.present(reference, negotiation_bank).await?,
            Command::Arrival {
                reference,
                import_bank,
            } => self.engine.arrival(reference, import_bank).await?,
            Command::Payment { reference } => self.engine.pay(reference).await?,
        };
        Ok(Outcome::new(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_typed_commands() {
        assert_eq!(
            Command::parse(&args(&["present", "REF1", "BankN"])).unwrap(),
            Command::Present {
                reference: "REF1".to_string(),
                negotiation_bank: "BankN".to_string(),
            }
        );
        assert_eq!(
            Command::parse(&args(&["inspect", "REF1", "ExpCo", "ShipCo"])).unwrap(),
            Command::Inspect {
                reference: "REF1".to_string(),
                exporter: "ExpCo".to_string(),
                shipping_corporation: "ShipCo".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_checks_arity_for_every_action() {
        for spec in ACTIONS {
            let mut too_many = vec![spec.name.to_string()];
            too_many.extend((1..=spec.arity).map(|i| format!("arg{}", i)));
            let err = Command::parse(&too_many).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCount, "{}", spec.name);
            assert!(err.to_string().contains(&spec.arity.to_string()));

            let too_few = vec![spec.name.to_string()];
            assert_eq!(
                Command::parse(&too_few).unwrap_err().kind(),
                ErrorKind::ArgumentCount
            );
        }
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        let err = Command::parse(&args(&["cancel", "REF1"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownAction);

        let err = Command::parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn test_outcome_body_prefers_override() {
        let mut outcome = Outcome::new(b"computed".to_vec());
        assert_eq!(outcome.body(), b"computed");

        outcome.override_payload = Some(b"substitute".to_vec());
        assert_eq!(outcome.body(), b"substitute");
        assert_eq!(outcome.into_body(), b"substitute".to_vec());
    }
}
