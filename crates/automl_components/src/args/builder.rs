//! Emit policies and ordered argument list assembly.
//!
//! Every field carries an explicit policy tag instead of per-call
//! conditionals, so the full policy table of a component is auditable in
//! one place and testable independent of rendering.

use super::value::ArgValue;

/// Presence policy for one command-line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitPolicy {
    /// Emitted as `--flag=value` even when the value equals its default.
    /// Sentinel defaults (`-1`, empty string, `[]`, `{}`) still render.
    AlwaysEmit,
    /// Emitted only when the caller supplied a value; otherwise the flag
    /// is entirely absent, never passed as an empty string.
    EmitIfPresent,
}

/// One field of a component's command-line contract: flag name, policy,
/// and the (possibly absent) value to render.
#[derive(Debug, Clone)]
pub struct ArgField {
    flag: &'static str,
    policy: EmitPolicy,
    value: Option<ArgValue>,
}

impl ArgField {
    /// An always-emit field. The value renders even at its default.
    pub fn always(flag: &'static str, value: impl Into<ArgValue>) -> Self {
        Self {
            flag,
            policy: EmitPolicy::AlwaysEmit,
            value: Some(value.into()),
        }
    }

    /// A conditional-emit field. `None` yields no fragment at all.
    pub fn if_present(flag: &'static str, value: Option<ArgValue>) -> Self {
        Self {
            flag,
            policy: EmitPolicy::EmitIfPresent,
            value,
        }
    }

    /// The flag name without leading dashes.
    pub fn flag(&self) -> &'static str {
        self.flag
    }

    /// The field's presence policy.
    pub fn policy(&self) -> EmitPolicy {
        self.policy
    }

    /// Resolve this field into its fragment, if any.
    ///
    /// Always-emit fields produce exactly one `--flag=value` token;
    /// conditional fields produce one token when set, none when unset.
    pub fn resolve(&self) -> Option<String> {
        match (self.policy, &self.value) {
            (EmitPolicy::AlwaysEmit, value) => {
                let rendered = value.as_ref().map(ArgValue::render).unwrap_or_default();
                Some(format!("--{}={}", self.flag, rendered))
            }
            (EmitPolicy::EmitIfPresent, Some(value)) => {
                Some(format!("--{}={}", self.flag, value.render()))
            }
            (EmitPolicy::EmitIfPresent, None) => None,
        }
    }
}

/// Builder for an ordered argument list: subcommand first, then each
/// field's resolved fragment in the order fields were added.
///
/// Field order is part of the wire contract with the external container;
/// callers must add fields in the contract's declared order.
pub struct ArgListBuilder {
    args: Vec<String>,
}

impl ArgListBuilder {
    /// Start a new argument list with the given subcommand literal.
    pub fn new(subcommand: &str) -> Self {
        Self {
            args: vec![subcommand.to_string()],
        }
    }

    /// Append one field's resolved fragment (if any).
    pub fn field(mut self, field: ArgField) -> Self {
        match field.resolve() {
            Some(token) => self.args.push(token),
            None => {
                tracing::debug!("conditional flag --{} not supplied, skipping", field.flag());
            }
        }
        self
    }

    /// Finish and return the argument tokens.
    pub fn build(self) -> Vec<String> {
        tracing::debug!("built argument list with {} tokens", self.args.len());
        self.args
    }
}

/// Format an argument list for pretty display (one token per line).
pub fn format_args_pretty(args: &[String]) -> String {
    let mut result = String::new();
    for (i, token) in args.iter().enumerate() {
        if i + 1 < args.len() {
            result.push_str(&format!("{} \\\n", token));
        } else {
            result.push_str(&format!("{}\n", token));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_emit_renders_default_values() {
        let field = ArgField::always("target_column", "");
        assert_eq!(field.resolve(), Some("--target_column=".to_string()));

        let field = ArgField::always("context_window", -1i64);
        assert_eq!(field.resolve(), Some("--context_window=-1".to_string()));
    }

    #[test]
    fn if_present_skips_unset_values() {
        let field = ArgField::if_present("group_columns", None);
        assert_eq!(field.resolve(), None);
        assert_eq!(field.policy(), EmitPolicy::EmitIfPresent);
    }

    #[test]
    fn if_present_renders_supplied_values() {
        let field = ArgField::if_present(
            "stage_1_deadline_hours",
            Some(ArgValue::Float(24.5)),
        );
        assert_eq!(
            field.resolve(),
            Some("--stage_1_deadline_hours=24.5".to_string())
        );
    }

    #[test]
    fn builder_preserves_field_order() {
        let args = ArgListBuilder::new("subcmd")
            .field(ArgField::always("first", "a"))
            .field(ArgField::if_present("skipped", None))
            .field(ArgField::always("second", "b"))
            .build();
        assert_eq!(args, vec!["subcmd", "--first=a", "--second=b"]);
    }

    #[test]
    fn pretty_format_one_token_per_line() {
        let args = vec!["subcmd".to_string(), "--a=1".to_string()];
        let pretty = format_args_pretty(&args);
        assert_eq!(pretty, "subcmd \\\n--a=1\n");
    }
}
