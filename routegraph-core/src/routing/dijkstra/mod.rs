mod search_tree;
mod state;

pub(crate) use search_tree::dijkstra_tree;
