pub mod vfile;
