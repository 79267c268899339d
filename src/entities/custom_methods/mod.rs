pub mod recurrence_rule;
