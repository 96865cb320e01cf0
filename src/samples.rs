// Sample data loaded into a fresh library: eight readers and a dozen
// books. Identification documents and ISBNs are the natural keys the
// seeder uses to avoid inserting the same record twice.

use crate::models::{NewBook, NewUser};

pub const SAMPLE_USERS: &[NewUser] = &[
    NewUser {
        name: "María García López",
        identification_document: "12345678A",
        email: "maria.garcia@biblioteca.mx",
    },
    NewUser {
        name: "Carlos Rodríguez Pérez",
        identification_document: "23456789B",
        email: "carlos.rodriguez@biblioteca.mx",
    },
    NewUser {
        name: "Ana Martínez Torres",
        identification_document: "34567890C",
        email: "ana.martinez@biblioteca.mx",
    },
    NewUser {
        name: "Luis Hernández Díaz",
        identification_document: "45678901D",
        email: "luis.hernandez@biblioteca.mx",
    },
    NewUser {
        name: "Sofía González Ruiz",
        identification_document: "56789012E",
        email: "sofia.gonzalez@biblioteca.mx",
    },
    NewUser {
        name: "Diego López Sánchez",
        identification_document: "67890123F",
        email: "diego.lopez@biblioteca.mx",
    },
    NewUser {
        name: "Valentina Castro Jiménez",
        identification_document: "78901234G",
        email: "valentina.castro@biblioteca.mx",
    },
    NewUser {
        name: "Andrés Morales Vargas",
        identification_document: "89012345H",
        email: "andres.morales@biblioteca.mx",
    },
];

pub const SAMPLE_BOOKS: &[NewBook] = &[
    NewBook {
        title: "El Quijote",
        author: "Miguel de Cervantes",
        isbn: "978-84-206-0000-1",
        total_quantity: 5,
    },
    NewBook {
        title: "Cien años de soledad",
        author: "Gabriel García Márquez",
        isbn: "978-84-397-0495-1",
        total_quantity: 4,
    },
    NewBook {
        title: "1984",
        author: "George Orwell",
        isbn: "978-0-452-28423-4",
        total_quantity: 3,
    },
    NewBook {
        title: "El Principito",
        author: "Antoine de Saint-Exupéry",
        isbn: "978-84-9838-388-3",
        total_quantity: 6,
    },
    NewBook {
        title: "Fundación",
        author: "Isaac Asimov",
        isbn: "978-84-450-7640-3",
        total_quantity: 3,
    },
    NewBook {
        title: "El Señor de los Anillos",
        author: "J.R.R. Tolkien",
        isbn: "978-84-450-7770-7",
        total_quantity: 4,
    },
    NewBook {
        title: "Fahrenheit 451",
        author: "Ray Bradbury",
        isbn: "978-84-450-7642-7",
        total_quantity: 2,
    },
    NewBook {
        title: "Clean Code",
        author: "Robert C. Martin",
        isbn: "978-0-13-235088-4",
        total_quantity: 3,
    },
    NewBook {
        title: "Design Patterns",
        author: "Gang of Four",
        isbn: "978-0-20-163361-5",
        total_quantity: 2,
    },
    NewBook {
        title: "The Pragmatic Programmer",
        author: "David Thomas & Andrew Hunt",
        isbn: "978-0-13-595705-9",
        total_quantity: 3,
    },
    NewBook {
        title: "Crimen y Castigo",
        author: "Fiódor Dostoyevski",
        isbn: "978-84-376-0299-2",
        total_quantity: 3,
    },
    NewBook {
        title: "Sapiens: De animales a dioses",
        author: "Yuval Noah Harari",
        isbn: "978-84-9992-255-0",
        total_quantity: 4,
    },
];
