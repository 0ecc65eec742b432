//! Static product catalog and the card sequence shown in the grid.
//!
//! Products are configuration: they are defined once, never mutated, and the
//! order of the backing slice is the display order.

/// Stable product identifier.
pub type ProductId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    /// Locator of the binary glTF model.
    pub model: &'static str,
    /// Locator of the thumbnail image.
    pub image: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub static BUILTIN_PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Headphone",
        model: "/models/headphone.glb",
        image: "/images/headphone.png",
        price: "$99",
        description: "High-quality wireless headphones for immersive sound.",
    },
    Product {
        id: 2,
        name: "Gaming Laptop",
        model: "/models/gaming_laptop.glb",
        image: "/images/gaming_laptop.png",
        price: "$1499",
        description: "High-performance gaming laptop for immersive experiences.",
    },
];

/// What one grid card displays. A pure projection of its [`Product`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub thumbnail: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            thumbnail: p.image,
            name: p.name,
            price: p.price,
            description: p.description,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    pub fn new(products: &'static [Product]) -> Self {
        debug_assert!(
            products
                .iter()
                .enumerate()
                .all(|(i, p)| products[..i].iter().all(|q| q.id != p.id)),
            "product ids must be unique"
        );
        Self { products }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_PRODUCTS)
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Cards in display order. The iterator is lazy and can be cloned to
    /// restart the sequence.
    pub fn cards(&self) -> impl Iterator<Item = ProductCard> + Clone + 'static {
        self.products.iter().map(ProductCard::from)
    }

    /// Model locators in display order, used to seed the preload.
    pub fn asset_locators(&self) -> impl Iterator<Item = &'static str> + 'static {
        self.products.iter().map(|p| p.model)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
