pub mod quiz_prompt;
