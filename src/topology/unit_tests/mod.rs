#[cfg(test)]
mod bridge_tests;
#[cfg(test)]
mod mesh_tests;
