use crate::answers::{self, Answers, DEFAULT_HOST_PORT, Draft};
use crate::error::GrogError;
use crate::probe::{OTHER_BOX, ProbedOptions};
use crate::prompt::{Prompter, Validator};

// ── field table ──────────────────────────────────────────

/// How a field is asked: a choice over one of the probed lists, or free
/// text with an optional displayed default and validator. Defaults are
/// generated from the draft as it stands when the prompt is reached.
#[derive(Clone, Copy)]
enum Ask {
    Select(fn(&ProbedOptions) -> &[String]),
    MultiSelect(fn(&ProbedOptions) -> &[String]),
    Text {
        default: Option<fn(&Draft) -> String>,
        validate: Option<Validator>,
    },
}

enum Value {
    One(String),
    Many(Vec<String>),
}

/// One questionnaire entry: message, optional help line, a visibility
/// predicate over the answers so far, the ask kind, and the store
/// function that folds the accepted value into the draft.
struct Field {
    message: &'static str,
    help: Option<&'static str>,
    when: Option<fn(&Draft) -> bool>,
    ask: Ask,
    store: fn(&mut Draft, Value),
}

const FIELDS: &[Field] = &[
    Field {
        message: "Vagrant box:",
        help: Some("Installed boxes from `vagrant box list`; pick Other to add a new one"),
        when: None,
        ask: Ask::Select(probed_boxes),
        store: store_box_name,
    },
    Field {
        message: "New box name:",
        help: None,
        when: Some(when_other_box),
        ask: Ask::Text {
            default: None,
            validate: Some(validate_non_empty),
        },
        store: store_new_box_name,
    },
    Field {
        message: "New box URL:",
        help: Some("Where vagrant can download the box (ftp, http or https)"),
        when: Some(when_other_box),
        ask: Ask::Text {
            default: None,
            validate: Some(validate_url),
        },
        store: store_new_box_url,
    },
    Field {
        message: "Guest hostname:",
        help: None,
        when: None,
        ask: Ask::Text {
            default: None,
            validate: Some(validate_non_empty),
        },
        store: store_host_name,
    },
    Field {
        message: "Forwarded port:",
        help: Some("Host port forwarded to the same port on the guest"),
        when: None,
        ask: Ask::Text {
            default: Some(default_host_port),
            validate: Some(validate_port),
        },
        store: store_host_port,
    },
    Field {
        message: "Chef roles:",
        help: Some("Space to toggle, enter to accept; none is fine"),
        when: None,
        ask: Ask::MultiSelect(probed_roles),
        store: store_knife_roles,
    },
    Field {
        message: "Chef environment:",
        help: None,
        when: None,
        ask: Ask::Select(probed_environments),
        store: store_knife_environment,
    },
    Field {
        message: "Chef organisation:",
        help: Some("The organisation name registered with your Chef server"),
        when: None,
        ask: Ask::Text {
            default: None,
            validate: Some(validate_non_empty),
        },
        store: store_organisation_name,
    },
    Field {
        message: "Chef server URL:",
        help: None,
        when: None,
        ask: Ask::Text {
            default: Some(default_server_url),
            validate: None,
        },
        store: store_server_url,
    },
    Field {
        message: "Validation client name:",
        help: None,
        when: None,
        ask: Ask::Text {
            default: Some(default_validation_client_name),
            validate: None,
        },
        store: store_validation_client_name,
    },
    Field {
        message: "Validation key path:",
        help: None,
        when: None,
        ask: Ask::Text {
            default: Some(default_validation_key_path),
            validate: None,
        },
        store: store_validation_key_path,
    },
];

// ── driver ───────────────────────────────────────────────

/// Walk the field table against the given prompt backend and seal the
/// resulting draft. A select/multi-select whose probed list is empty is
/// skipped with a warning instead of offering nothing.
pub fn run(prompter: &mut dyn Prompter, probed: &ProbedOptions) -> Result<Answers, GrogError> {
    let mut draft = Draft::default();

    for field in FIELDS {
        if let Some(when) = field.when
            && !when(&draft)
        {
            continue;
        }

        let value = match field.ask {
            Ask::Select(options) => {
                let options = options(probed);
                if options.is_empty() {
                    tracing::warn!(prompt = field.message, "no options to choose from, skipping");
                    continue;
                }
                Value::One(prompter.select(field.message, field.help, options)?)
            }
            Ask::MultiSelect(options) => {
                let options = options(probed);
                if options.is_empty() {
                    tracing::warn!(prompt = field.message, "no options to choose from, skipping");
                    continue;
                }
                Value::Many(prompter.multi_select(field.message, field.help, options)?)
            }
            Ask::Text { default, validate } => {
                let default = default.map(|generate| generate(&draft));
                Value::One(prompter.text(field.message, field.help, default.as_deref(), validate)?)
            }
        };

        (field.store)(&mut draft, value);
    }

    draft.finish()
}

// ── option lists ─────────────────────────────────────────

fn probed_boxes(probed: &ProbedOptions) -> &[String] {
    &probed.boxes
}

fn probed_roles(probed: &ProbedOptions) -> &[String] {
    &probed.roles
}

fn probed_environments(probed: &ProbedOptions) -> &[String] {
    &probed.environments
}

// ── visibility predicates ────────────────────────────────

fn when_other_box(draft: &Draft) -> bool {
    draft.box_name.as_deref() == Some(OTHER_BOX)
}

// ── default generators ───────────────────────────────────

fn default_host_port(_draft: &Draft) -> String {
    DEFAULT_HOST_PORT.to_string()
}

fn default_server_url(draft: &Draft) -> String {
    answers::default_server_url(draft.organisation_name.as_deref().unwrap_or_default())
}

fn default_validation_client_name(draft: &Draft) -> String {
    answers::default_validation_client_name(draft.organisation_name.as_deref().unwrap_or_default())
}

fn default_validation_key_path(draft: &Draft) -> String {
    answers::default_validation_key_path(draft.validation_client_name.as_deref().unwrap_or_default())
}

// ── validators ───────────────────────────────────────────

fn validate_non_empty(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("this field cannot be empty".to_string())
    } else {
        Ok(())
    }
}

fn validate_url(input: &str) -> Result<(), String> {
    if answers::is_url(input) {
        Ok(())
    } else {
        Err("must be an ftp://, http:// or https:// URL".to_string())
    }
}

fn validate_port(input: &str) -> Result<(), String> {
    answers::parse_port(input).map(|_| ())
}

// ── store functions ──────────────────────────────────────

fn store_box_name(draft: &mut Draft, value: Value) {
    if let Value::One(label) = value {
        draft.box_name = Some(answers::strip_annotation(&label));
    }
}

fn store_new_box_name(draft: &mut Draft, value: Value) {
    if let Value::One(name) = value {
        draft.new_box_name = Some(name);
    }
}

fn store_new_box_url(draft: &mut Draft, value: Value) {
    if let Value::One(url) = value {
        draft.new_box_url = Some(url);
    }
}

fn store_host_name(draft: &mut Draft, value: Value) {
    if let Value::One(host) = value {
        draft.host_name = Some(host);
    }
}

fn store_host_port(draft: &mut Draft, value: Value) {
    if let Value::One(port) = value {
        draft.host_port = answers::parse_port(&port).ok();
    }
}

fn store_knife_roles(draft: &mut Draft, value: Value) {
    if let Value::Many(roles) = value {
        draft.knife_roles = Some(roles);
    }
}

fn store_knife_environment(draft: &mut Draft, value: Value) {
    if let Value::One(environment) = value {
        draft.knife_environment = Some(environment);
    }
}

fn store_organisation_name(draft: &mut Draft, value: Value) {
    if let Value::One(organisation) = value {
        draft.organisation_name = Some(organisation);
    }
}

fn store_server_url(draft: &mut Draft, value: Value) {
    if let Value::One(url) = value {
        draft.server_url = Some(url);
    }
}

fn store_validation_client_name(draft: &mut Draft, value: Value) {
    if let Value::One(name) = value {
        draft.validation_client_name = Some(name);
    }
}

fn store_validation_key_path(draft: &mut Draft, value: Value) {
    if let Value::One(path) = value {
        draft.validation_key_path = Some(path);
    }
}

// ── tests ────────────────────────────────────────────────
