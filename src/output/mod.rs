// Output formatting — machine-readable JSON is printed by main; this
// module holds the human-readable terminal rendering behind --pretty.

pub mod terminal;
