pub mod flow_case;
pub mod flow_session;

pub use flow_case::{FlowCase, FlowFamily, SubVariant};
pub use flow_session::FlowSession;
