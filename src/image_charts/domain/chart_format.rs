use crate::domain::parameter_store::ParameterStore;
use image::ImageFormat;

/// Output format of a rendered chart. Animated charts (`chan`) are gifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Gif,
}

impl ChartFormat {
    pub fn for_parameters(parameters: &ParameterStore) -> Self {
        if parameters.has("chan") {
            ChartFormat::Gif
        } else {
            ChartFormat::Png
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Gif => "gif",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            ChartFormat::Png => ImageFormat::Png,
            ChartFormat::Gif => ImageFormat::Gif,
        }
    }
}
