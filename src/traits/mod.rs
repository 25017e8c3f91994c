pub mod category_source;
pub mod flag_evaluator;
