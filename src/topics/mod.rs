// Topic grouping — fixed keyword rules over article titles.

pub mod rules;
