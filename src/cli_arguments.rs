use camino::Utf8PathBuf;

use crate::mask::MaskRectangle;

#[derive(gumdrop::Options)]
pub struct CliArguments {
    pub help: bool,

    #[options(help = "Input directory containing images.", short = "i", meta = "<PATH>", default = "./data/DeltaX/Cam_002")]
    pub input: Utf8PathBuf,

    #[options(help = "Output directory for masked images. Created if it does not exist.", short = "o", meta = "<PATH>", default = "./data/DeltaX/Cam_002_mask")]
    pub output: Utf8PathBuf,

    #[options(help = "X-coordinate of the top-left corner of the mask.", no_short, meta = "<PIXELS>", default = "700")]
    pub x1: i64,

    #[options(help = "Y-coordinate of the top-left corner of the mask.", no_short, meta = "<PIXELS>", default = "150")]
    pub y1: i64,

    #[options(help = "X-coordinate of the bottom-right corner of the mask.", no_short, meta = "<PIXELS>", default = "1320")]
    pub x2: i64,

    #[options(help = "Y-coordinate of the bottom-right corner of the mask.", no_short, meta = "<PIXELS>", default = "530")]
    pub y2: i64,
}

impl CliArguments {
    pub fn mask_rectangle(&self) -> MaskRectangle {
        MaskRectangle::new(self.x1, self.y1, self.x2, self.y2)
    }
}
