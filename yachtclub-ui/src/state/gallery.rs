//! Gallery images and lightbox state.

/// A gallery image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Shown when an image fails to load
pub const PLACEHOLDER_SRC: &str = "images/placeholder.svg";

pub const GALLERY_IMAGES: [GalleryImage; 9] = [
    GalleryImage {
        src: "images/beautiful-woman-yacht-swimwear.jpg",
        alt: "Woman on yacht in Phuket waters",
    },
    GalleryImage {
        src: "images/473599725_10160435212412175_501266893980304214_n.jpg",
        alt: "Yacht sailing in Phuket",
    },
    GalleryImage {
        src: "images/148872788_3169037883196094_849598998136454814_n.jpg",
        alt: "Yacht Club gathering",
    },
    GalleryImage {
        src: "images/118274592_10157223767507175_1027198816200289080_n.jpg",
        alt: "Sailing in Phuket",
    },
    GalleryImage {
        src: "images/75380478_10156391073797175_4972174924367003648_n.jpg",
        alt: "Yacht sailing",
    },
    GalleryImage {
        src: "images/463398656_7798563456910157_6872878179612088792_n.jpg",
        alt: "Seafood at the yacht club",
    },
    GalleryImage {
        src: "images/468066240_10102904678842276_3997282509366841665_n.jpg",
        alt: "Yacht club members",
    },
    GalleryImage {
        src: "images/464508298_8693886117336396_5575655286860524176_n.jpg",
        alt: "Sailing yacht",
    },
    GalleryImage {
        src: "images/sailboat-414509_1280.jpg",
        alt: "Sailboat at sunset",
    },
];

/// Keys that open a focused tile
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Which image, if any, is enlarged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn image(&self) -> Option<GalleryImage> {
        self.open.and_then(|index| GALLERY_IMAGES.get(index).copied())
    }

    /// Open the image at `index`; out-of-range indices are ignored
    pub fn activate(&mut self, index: usize) -> bool {
        if index < GALLERY_IMAGES.len() {
            self.open = Some(index);
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Escape closes an open lightbox; returns whether the key was consumed
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.dismiss();
            true
        } else {
            false
        }
    }
}
