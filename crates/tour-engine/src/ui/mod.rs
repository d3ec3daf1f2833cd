pub mod arrows;
