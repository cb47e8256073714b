//! Fixed sample values every survey record is drawn from.

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

impl Country {
    #[must_use]
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.contains(&city)
    }
}

/// Looks up a country in [`COUNTRIES`] by its exact name.
#[must_use]
pub fn find_country(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.name == name)
}

const fn product(id: u32, name: &'static str, category: &'static str) -> Product {
    Product { id, name, category }
}

pub static PRODUCTS: [Product; 16] = [
    product(1001, "Laptop Pro X1", "Electronics"),
    product(1002, "Smartphone Galaxy", "Electronics"),
    product(1003, "Wireless Headphones", "Electronics"),
    product(1004, "4K Monitor", "Electronics"),
    product(1005, "Gaming Mouse", "Electronics"),
    product(2001, "Office Chair Deluxe", "Furniture"),
    product(2002, "Standing Desk", "Furniture"),
    product(2003, "LED Desk Lamp", "Furniture"),
    product(3001, "Running Shoes Pro", "Sports"),
    product(3002, "Yoga Mat Premium", "Sports"),
    product(3003, "Fitness Tracker", "Sports"),
    product(4001, "Coffee Maker Deluxe", "Appliances"),
    product(4002, "Blender Pro", "Appliances"),
    product(4003, "Air Fryer XL", "Appliances"),
    product(5001, "Winter Jacket", "Clothing"),
    product(5002, "Casual Sneakers", "Clothing"),
];

pub static FIRST_NAMES: [&str; 28] = [
    "John",
    "Maria",
    "Carlos",
    "Ana",
    "Michael",
    "Laura",
    "David",
    "Sofia",
    "James",
    "Isabella",
    "Robert",
    "Camila",
    "William",
    "Valentina",
    "Richard",
    "Emma",
    "Jose",
    "Lucia",
    "Thomas",
    "Victoria",
    "Daniel",
    "Mariana",
    "Matthew",
    "Gabriela",
    "Christopher",
    "Daniela",
    "Antonio",
    "Sara",
];

/// "Lopez" is listed twice, so it comes up twice as often as the other names.
pub static LAST_NAMES: [&str; 29] = [
    "Smith",
    "Johnson",
    "Garcia",
    "Rodriguez",
    "Martinez",
    "Brown",
    "Davis",
    "Wilson",
    "Moore",
    "Taylor",
    "Anderson",
    "Thomas",
    "Jackson",
    "White",
    "Harris",
    "Martin",
    "Thompson",
    "Lopez",
    "Lee",
    "Gonzalez",
    "Hernandez",
    "Young",
    "King",
    "Wright",
    "Lopez",
    "Hill",
    "Scott",
    "Green",
    "Adams",
];

pub static COUNTRIES: [Country; 8] = [
    Country {
        name: "United States",
        cities: &["New York", "Los Angeles", "Chicago", "Houston", "Miami"],
    },
    Country {
        name: "Canada",
        cities: &["Toronto", "Montreal", "Vancouver", "Calgary", "Ottawa"],
    },
    Country {
        name: "Mexico",
        cities: &["Mexico City", "Guadalajara", "Monterrey", "Cancun", "Puebla"],
    },
    Country {
        name: "Spain",
        cities: &["Madrid", "Barcelona", "Valencia", "Seville", "Bilbao"],
    },
    Country {
        name: "Argentina",
        cities: &["Buenos Aires", "Cordoba", "Rosario", "Mendoza", "La Plata"],
    },
    Country {
        name: "Colombia",
        cities: &["Bogota", "Medellin", "Cali", "Barranquilla", "Cartagena"],
    },
    Country {
        name: "Brazil",
        cities: &["Sao Paulo", "Rio de Janeiro", "Brasilia", "Salvador", "Fortaleza"],
    },
    Country {
        name: "United Kingdom",
        cities: &["London", "Manchester", "Birmingham", "Liverpool", "Edinburgh"],
    },
];

pub static POSITIVE_COMMENTS: [&str; 10] = [
    "Excellent product, exceeded my expectations!",
    "Great quality, very satisfied with my purchase.",
    "Amazing! Worth every penny.",
    "Best purchase I've made this year.",
    "Outstanding quality and fast delivery.",
    "Highly recommend this product to everyone.",
    "Perfect! Exactly what I was looking for.",
    "Impressive performance and design.",
    "Very happy with this purchase.",
    "Fantastic product, will buy again!",
];

pub static NEUTRAL_COMMENTS: [&str; 8] = [
    "Product is okay, nothing special.",
    "Average quality for the price.",
    "It works as expected.",
    "Decent product, meets basic needs.",
    "Not bad, but could be better.",
    "Standard quality, nothing outstanding.",
    "It's fine for everyday use.",
    "Acceptable, meets minimum requirements.",
];

pub static NEGATIVE_COMMENTS: [&str; 8] = [
    "Disappointed with the quality.",
    "Not what I expected, poor quality.",
    "Broke after a few days of use.",
    "Would not recommend this product.",
    "Waste of money, very disappointed.",
    "Poor customer service and defective product.",
    "Does not work as advertised.",
    "Terrible quality, returning it.",
];
