/// Display text of every backend rejection
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";

/// Status line after a successful create
pub const INVESTMENT_CREATED_MESSAGE: &str = "Investment created successfully!";

/// Status line after a successful update
pub const INVESTMENT_UPDATED_MESSAGE: &str = "Investment updated successfully!";

/// Status line after a successful delete
pub const INVESTMENT_DELETED_MESSAGE: &str = "Investment deleted successfully!";

/// Submit label in create mode
pub const CREATE_LABEL: &str = "Create";

/// Submit label in edit mode
pub const UPDATE_LABEL: &str = "Update";

/// Placeholder id carried by records the backend has not persisted yet
pub const UNSAVED_INVESTMENT_ID: i64 = 0;
