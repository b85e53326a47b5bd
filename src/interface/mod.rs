pub mod prompts;
pub mod render;

pub use prompts::{
    complete_profile, prompt_activity, prompt_age, prompt_height, prompt_sex, prompt_weight,
    prompt_yes_no,
};
pub use render::{
    DisplayTable, display_brackets, display_table, display_vector, format_vector, vector_legend,
};
