//! Text persistence and interactive input.

pub mod prompt;
pub mod text;

pub use prompt::{read_matrix_interactive, read_vector_interactive};
pub use text::{
    load_matrix, load_vectors, read_matrix, read_vectors, save_matrix, save_vectors, write_matrix,
    write_vectors,
};
