use super::*;

pub type RootHandler = fn(&StoreClient, &Params) -> Result<Action, CommandError>;
pub type BoundHandler = fn(&StoreClient, &str, &Params) -> Result<Action, CommandError>;

/// What a route does in one navigation context: run a handler, or refuse
/// with a fixed message.
#[derive(Clone, Copy)]
pub enum Conduct<H> {
    Run(H),
    Deny(&'static str),
}

/// One registered command pattern. Literal tokens must match the input
/// exactly; `:name` tokens bind positionally. Each context gets its own
/// conduct, so the same pattern can do two unrelated things.
pub struct Route {
    pub pattern: &'static str,
    pub help: Option<&'static str>,
    pub at_root: Conduct<RootHandler>,
    pub when_bound: Conduct<BoundHandler>,
}

/// What the session loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Print(String),
    Bind(String),
    Unbind,
    Help,
    Quit,
}

pub fn route_table() -> Vec<Route> {
    use self::Conduct::{Deny, Run};
    use super::dispatch as d;

    vec![
        Route {
            pattern: "ls",
            help: Some("List databases or documents"),
            at_root: Run(d::cmd_ls_root),
            when_bound: Run(d::cmd_ls_bound),
        },
        Route {
            pattern: "ll",
            help: Some("List databases or documents, one per line"),
            at_root: Run(d::cmd_ll_root),
            when_bound: Run(d::cmd_ll_bound),
        },
        Route {
            pattern: "cat :id",
            help: Some("Print database summary or document contents"),
            at_root: Run(d::cmd_cat_db),
            when_bound: Run(d::cmd_cat_doc),
        },
        Route {
            pattern: "ls :key",
            help: Some("List documents whose ids start with a key"),
            at_root: Deny("You cannot do 'ls <key>' from the top level"),
            when_bound: Run(d::cmd_ls_key),
        },
        Route {
            pattern: "ll :key",
            help: Some("List documents whose ids start with a key, one per line"),
            at_root: Deny("You cannot do 'll <key>' from the top level"),
            when_bound: Run(d::cmd_ll_key),
        },
        Route {
            pattern: "rm :id",
            help: Some("Remove a document"),
            at_root: Deny("You cannot do 'rm <id>' from the top level"),
            when_bound: Run(d::cmd_rm),
        },
        Route {
            pattern: "cp :sourceid :destinationid",
            help: Some("Copy a document/database"),
            at_root: Run(d::cmd_cp_replicate),
            when_bound: Run(d::cmd_cp_doc),
        },
        Route {
            pattern: "mkdir :db",
            help: Some("Create database"),
            at_root: Run(d::cmd_mkdir),
            when_bound: Deny("You cannot create a database inside a database!"),
        },
        Route {
            pattern: "rmdir :db",
            help: Some("Remove a database"),
            at_root: Run(d::cmd_rmdir),
            when_bound: Deny("You cannot remove a database from here!"),
        },
        Route {
            pattern: "cd ..",
            help: Some("Return to the top level"),
            at_root: Run(d::cmd_cd_up_root),
            when_bound: Run(d::cmd_cd_up),
        },
        Route {
            pattern: "cd :db",
            help: Some("Change to a database"),
            at_root: Run(d::cmd_cd_db),
            when_bound: Deny("You cannot change database from here. Try 'cd ..' first"),
        },
        Route {
            pattern: "echo :json > :id",
            help: Some("Create a document"),
            at_root: Deny("You cannot do 'echo <json>' from the top level"),
            when_bound: Run(d::cmd_echo_with_id),
        },
        Route {
            pattern: "echo :json",
            help: Some("Create a document with auto-generated id"),
            at_root: Deny("You cannot do 'echo <json>' from the top level"),
            when_bound: Run(d::cmd_echo),
        },
        Route {
            pattern: "touch :id",
            help: Some("Create a new empty document, or re-save an existing one"),
            at_root: Deny("You cannot do 'touch <id>' from the top level"),
            when_bound: Run(d::cmd_touch),
        },
        Route {
            pattern: "tree :id",
            help: Some("View the revision history of a document"),
            at_root: Deny("You cannot do 'tree <id>' from the top level"),
            when_bound: Run(d::cmd_tree),
        },
        Route {
            pattern: "head :db",
            help: Some("Show the first ten documents of a database"),
            at_root: Run(d::cmd_head),
            when_bound: Deny("You cannot do 'head <db>' from the db level"),
        },
        Route {
            pattern: "pwd",
            help: Some("Print working directory"),
            at_root: Run(d::cmd_pwd_root),
            when_bound: Run(d::cmd_pwd_bound),
        },
        Route {
            pattern: "du :db",
            help: Some("Disk usage of a database"),
            at_root: Run(d::cmd_du_named_root),
            when_bound: Run(d::cmd_du_named_bound),
        },
        Route {
            pattern: "du",
            help: Some("Disk usage of the current database"),
            at_root: Deny("You cannot do 'du' from the top level. Try 'du <dbname>'"),
            when_bound: Run(d::cmd_du_current),
        },
        Route {
            pattern: "fsck :id :rev",
            help: Some("Repair document (remove conflicts) by nominating a winning revision"),
            at_root: Deny("You cannot do 'fsck <id>' from the top level."),
            when_bound: Run(d::cmd_fsck_pick),
        },
        Route {
            pattern: "fsck :id",
            help: Some("Repair document (remove conflicts)"),
            at_root: Deny("You cannot do 'fsck <id>' from the top level."),
            when_bound: Run(d::cmd_fsck),
        },
        Route {
            pattern: "help",
            help: Some("Show this list of commands"),
            at_root: Run(d::cmd_help_root),
            when_bound: Run(d::cmd_help_bound),
        },
        Route {
            pattern: "quit",
            help: Some("Exit"),
            at_root: Run(d::cmd_quit_root),
            when_bound: Run(d::cmd_quit_bound),
        },
        Route {
            pattern: "exit",
            help: Some("Exit"),
            at_root: Run(d::cmd_quit_root),
            when_bound: Run(d::cmd_quit_bound),
        },
    ]
}

pub fn render_help(routes: &[Route]) -> String {
    routes
        .iter()
        .map(|route| match route.help {
            Some(help) => format!("{:<30}{}", route.pattern, help),
            None => route.pattern.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
