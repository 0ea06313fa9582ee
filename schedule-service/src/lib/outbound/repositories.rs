pub mod schedule;

pub use schedule::PostgresScheduleRepository;
