/// Core query modules
///
/// Contains the participation, portfolio, ranking and search queries that
/// run over the loaded catalog.

pub mod participation;
pub mod portfolio;
pub mod ranker;
pub mod searcher;

pub use participation::Participation;
pub use portfolio::Portfolios;
pub use ranker::Ranker;
pub use searcher::Searcher;
