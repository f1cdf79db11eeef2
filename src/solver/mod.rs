pub mod assignment;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod propagate;
pub mod stats;
pub mod work_list;
