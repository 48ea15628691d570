pub mod parsed_query;
pub use parsed_query::*;

pub mod restriction;
pub use restriction::*;

pub mod where_parser;
pub use where_parser::*;

pub mod projection;
pub use projection::*;

pub mod source;
pub use source::*;

pub mod group_by;
pub use group_by::*;

pub mod order_by;
pub use order_by::*;

pub mod aggregate;
pub use aggregate::*;

pub mod operators;
pub use operators::*;

pub mod logical_op;
pub use logical_op::*;

pub mod text_collector;
pub use text_collector::*;
