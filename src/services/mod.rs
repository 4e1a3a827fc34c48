pub mod agent_client;
pub mod reply;
pub mod session_id;
