use serde::Serialize;

/// Body shared by every route: `{"success": true, "message": "..."}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
