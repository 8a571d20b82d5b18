pub(crate) mod bst;
pub(crate) mod llrb;
