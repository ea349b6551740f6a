use clap::Args;
use medroute_core::search::Strategy;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Also print node, edge and distance statistics
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting location
    pub from: String,

    /// Destination
    pub to: String,

    /// Search strategy (bfs, dfs, ucs, astar); defaults to the configured one
    #[arg(long, short)]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct MissionArgs {
    /// Services to deliver to, in order (space or comma separated)
    #[arg(required = true, num_args = 1..)]
    pub services: Vec<String>,

    /// Search strategy (bfs, dfs, ucs, astar); defaults to the configured one
    #[arg(long, short)]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Services to deliver to, in order (space or comma separated)
    #[arg(required = true, num_args = 1..)]
    pub services: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct HeuristicsArgs {
    /// Goal whose estimate table to audit
    pub goal: String,
}
