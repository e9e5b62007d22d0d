//! Controller-Abläufe end-to-end über skriptbare Kollaborateure.

mod controller_flow;
mod support;
