mod user_input_policy;

pub use user_input_policy::{UserInputError, UserInputPolicy};
