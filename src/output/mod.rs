// Output formatting — terminal display of the pipeline's results.

pub mod terminal;
