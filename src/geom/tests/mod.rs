mod test_grid_basic;
mod test_mesh_sanity;
