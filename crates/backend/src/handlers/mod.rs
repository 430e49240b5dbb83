pub mod mock_dispatch;
pub mod upstream;
