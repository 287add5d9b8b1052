pub mod copilot_service;

pub use copilot_service::CopilotService;
