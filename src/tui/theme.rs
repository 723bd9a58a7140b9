pub mod flexoki {
    pub const BASE_500: u32 = 0x878580;

    // Accents
    pub const RED_400: u32 = 0xD14D41;

    pub const YELLOW_400: u32 = 0xD0A215;

    pub const GREEN_400: u32 = 0x879A39;

    pub const BLUE_400: u32 = 0x4385BE;
    pub const BLUE_600: u32 = 0x205EA6;
}
