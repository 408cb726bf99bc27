use serde_json::{json, Value};

use crate::model::settings::Settings;
use crate::services::glossary::GlossaryStore;

mod command;
mod glossary;
use command::Command;

/// Everything a request can read or change.
pub struct CoreState {
    pub store: GlossaryStore,
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        CoreState {
            store: GlossaryStore::from_settings(&settings),
            settings,
        }
    }
}

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn reply(id: Value, result: Result<Value, String>) -> String {
    match result {
        Ok(payload) => ok(id, payload),
        Err(e) => err(id, e),
    }
}

pub fn handle(state: &mut CoreState, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    log::debug!("request {cmd_str}");

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "glossary-core alive" })),
        Command::LanguagesList => ok(id, glossary::languages_list(state)),
        Command::LanguageSet => reply(id, glossary::language_set(state, payload)),
        Command::GlossaryLoad => reply(id, glossary::glossary_load(state, payload)),
        Command::GlossaryDiscover => ok(id, glossary::glossary_discover(state)),
        Command::GlossaryInfo => ok(id, glossary::glossary_info(state)),
        Command::GlossaryLookup => reply(id, glossary::glossary_lookup(state, payload)),
        Command::TermsFind => ok(id, glossary::terms_find(state, payload)),
        Command::MatchField => reply(id, glossary::match_field(state, payload)),
        Command::TextOpen => reply(id, glossary::text_open(payload)),
        Command::Unknown => err(id, "unknown command"),
    }
}
