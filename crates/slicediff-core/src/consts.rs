/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Side length of the square SSIM comparison window. Must be odd.
pub const SSIM_WINDOW_SIZE: usize = 7;

/// SSIM luminance stabilization constant factor (C1 = (K1 * L)^2).
pub const SSIM_K1: f64 = 0.01;

/// SSIM contrast stabilization constant factor (C2 = (K2 * L)^2).
pub const SSIM_K2: f64 = 0.03;

/// Dynamic range of the 8-bit slice rasters.
pub const SSIM_DATA_RANGE: f64 = 255.0;

/// Number of histogram bins for Otsu's thresholding over u8 rasters.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Outline thickness (in pixels) for contour bounding rectangles.
pub const CONTOUR_RECT_THICKNESS: usize = 2;

/// RGB color of contour bounding rectangles.
pub const CONTOUR_RECT_COLOR: [u8; 3] = [255, 0, 0];
