pub mod prompts;
pub mod render;

pub use prompts::prompt_yes_no;
pub use render::display_week;
