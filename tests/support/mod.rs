pub mod mock_surface;
