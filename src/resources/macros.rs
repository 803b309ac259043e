#[macro_export]
macro_rules! create_channels {
    ($configs:expr; $($id:expr),*) => {
        [
            $($crate::resources::ChannelHandler::new($id, $configs[$id])),*
        ]
    };
}
