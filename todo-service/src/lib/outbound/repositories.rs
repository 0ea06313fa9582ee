pub mod todo;

pub use todo::PostgresTodoRepository;
