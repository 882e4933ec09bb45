pub mod request_body;
pub mod text_to_video_stream_request;
pub mod voice_settings;
