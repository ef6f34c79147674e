use serde_json::Value;

use super::*;

/// Route the input and run the matched handler for the current navigation
/// context. Handlers never mutate the context; transitions come back as
/// actions for the session loop to apply.
pub fn execute(
    routes: &[Route],
    client: &StoreClient,
    context: &NavContext,
    line: &str,
) -> Result<Action, CommandError> {
    let (route, params) = match_route(routes, line)?;
    match context {
        NavContext::Root => match route.at_root {
            Conduct::Run(handler) => handler(client, &params),
            Conduct::Deny(message) => Err(CommandError::InvalidContext(message)),
        },
        NavContext::Database(name) => match route.when_bound {
            Conduct::Run(handler) => handler(client, name, &params),
            Conduct::Deny(message) => Err(CommandError::InvalidContext(message)),
        },
    }
}

fn list_ids(
    client: &StoreClient,
    db: &str,
    key: Option<&str>,
    separator: &str,
) -> Result<Action, CommandError> {
    let mut opts = ListOptions {
        limit: Some(LIST_LIMIT),
        ..ListOptions::default()
    };
    if let Some(key) = key {
        opts.startkey = Some(key.to_string());
        opts.endkey = Some(format!("{}{}", key, HIGH_KEY_SENTINEL));
    }
    let rows = client.list_documents(db, &opts)?;
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    Ok(Action::Print(ids.join(separator)))
}

pub(super) fn cmd_ls_root(client: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Print(client.list_databases()?.join(" ")))
}

pub(super) fn cmd_ls_bound(
    client: &StoreClient,
    db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    list_ids(client, db, None, " ")
}

pub(super) fn cmd_ll_root(client: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Print(client.list_databases()?.join("\n")))
}

pub(super) fn cmd_ll_bound(
    client: &StoreClient,
    db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    list_ids(client, db, None, "\n")
}

pub(super) fn cmd_ls_key(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    list_ids(client, db, Some(p.get("key")), " ")
}

pub(super) fn cmd_ll_key(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    list_ids(client, db, Some(p.get("key")), "\n")
}

pub(super) fn cmd_cat_db(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let info = client.database_info(p.get("id"))?;
    Ok(Action::Print(serde_json::to_string(&info)?))
}

pub(super) fn cmd_cat_doc(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let doc = client.get_document(db, p.get("id"))?;
    Ok(Action::Print(serde_json::to_string(&doc)?))
}

pub(super) fn cmd_rm(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let id = p.get("id");
    let doc = client.get_document(db, id)?;
    let rev = doc.get("_rev").and_then(Value::as_str).unwrap_or_default();
    let ack = client.delete_document(db, id, rev)?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_cp_replicate(
    client: &StoreClient,
    p: &Params,
) -> Result<Action, CommandError> {
    let source = client.config().database_url(p.get("sourceid"));
    let target = client.config().database_url(p.get("destinationid"));
    let ack = client.trigger_replication(&source, &target)?;
    Ok(Action::Print(format!(
        "Replication scheduled:\n{}",
        serde_json::to_string(&ack)?
    )))
}

pub(super) fn cmd_cp_doc(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let mut doc = client.get_document(db, p.get("sourceid"))?;
    if let Some(map) = doc.as_object_mut() {
        map.insert(
            "_id".to_string(),
            Value::String(p.get("destinationid").to_string()),
        );
        map.remove("_rev");
    }
    let ack = client.insert_document(db, &doc)?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_mkdir(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let ack = client.create_database(p.get("db"))?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_rmdir(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let ack = client.destroy_database(p.get("db"))?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_cd_up_root(_c: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Unbind)
}

pub(super) fn cmd_cd_up(
    _c: &StoreClient,
    _db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    Ok(Action::Unbind)
}

pub(super) fn cmd_cd_db(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let db = p.get("db");
    // Round-trip existence check; on failure the context stays put.
    client.database_info(db)?;
    Ok(Action::Bind(db.to_string()))
}

fn parse_echo_json(raw: &str) -> Result<Value, CommandError> {
    let stripped = raw.strip_prefix('\'').unwrap_or(raw);
    let stripped = stripped.strip_suffix('\'').unwrap_or(stripped);
    serde_json::from_str(stripped)
        .map_err(|_| CommandError::InvalidInput(format!("Invalid JSON - {}", raw)))
}

pub(super) fn cmd_echo_with_id(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let mut doc = parse_echo_json(p.get("json"))?;
    if let Some(map) = doc.as_object_mut() {
        map.insert(
            "_id".to_string(),
            Value::String(p.get("id").to_string()),
        );
    }
    let ack = client.insert_document(db, &doc)?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_echo(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let doc = parse_echo_json(p.get("json"))?;
    let ack = client.insert_document(db, &doc)?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_touch(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let id = p.get("id");
    let doc = match client.get_document(db, id) {
        Ok(doc) => doc,
        // Not found means create, not fail.
        Err(err) if err.is_not_found() => serde_json::json!({ "_id": id }),
        Err(err) => return Err(err.into()),
    };
    let ack = client.insert_document(db, &doc)?;
    Ok(Action::Print(serde_json::to_string(&ack)?))
}

pub(super) fn cmd_tree(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let revisions = client.get_document_revisions(db, p.get("id"))?;
    Ok(Action::Print(render_revision_tree(&revisions)))
}

pub(super) fn cmd_head(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let opts = ListOptions {
        limit: Some(LIST_LIMIT),
        include_docs: true,
        ..ListOptions::default()
    };
    let rows = client.list_documents(p.get("db"), &opts)?;
    Ok(Action::Print(serde_json::to_string(&rows)?))
}

pub(super) fn cmd_pwd_root(_c: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Print("/".to_string()))
}

pub(super) fn cmd_pwd_bound(
    _c: &StoreClient,
    db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    Ok(Action::Print(db.to_string()))
}

pub(super) fn cmd_du_named_root(client: &StoreClient, p: &Params) -> Result<Action, CommandError> {
    let info = client.database_info(p.get("db"))?;
    Ok(Action::Print(serde_json::to_string(&info)?))
}

pub(super) fn cmd_du_named_bound(
    client: &StoreClient,
    _db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let info = client.database_info(p.get("db"))?;
    Ok(Action::Print(serde_json::to_string(&info)?))
}

pub(super) fn cmd_du_current(
    client: &StoreClient,
    db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    let info = client.database_info(db)?;
    Ok(Action::Print(serde_json::to_string(&info)?))
}

pub(super) fn cmd_fsck(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let revisions = client.get_document_revisions(db, p.get("id"))?;
    if revisions.conflicts.is_empty() {
        return Ok(Action::Print("No conflicts found.".to_string()));
    }
    let plan = unsupervised_plan(&revisions);
    let results = client.bulk_docs(db, &plan)?;
    Ok(Action::Print(serde_json::to_string(&results)?))
}

pub(super) fn cmd_fsck_pick(
    client: &StoreClient,
    db: &str,
    p: &Params,
) -> Result<Action, CommandError> {
    let revisions = client.get_document_revisions(db, p.get("id"))?;
    if revisions.conflicts.is_empty() {
        return Ok(Action::Print("No conflicts found.".to_string()));
    }
    let plan = supervised_plan(&revisions, p.get("rev"))?;
    let results = client.bulk_docs(db, &plan)?;
    Ok(Action::Print(serde_json::to_string(&results)?))
}

pub(super) fn cmd_help_root(_c: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Help)
}

pub(super) fn cmd_help_bound(
    _c: &StoreClient,
    _db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    Ok(Action::Help)
}

pub(super) fn cmd_quit_root(_c: &StoreClient, _p: &Params) -> Result<Action, CommandError> {
    Ok(Action::Quit)
}

pub(super) fn cmd_quit_bound(
    _c: &StoreClient,
    _db: &str,
    _p: &Params,
) -> Result<Action, CommandError> {
    Ok(Action::Quit)
}
