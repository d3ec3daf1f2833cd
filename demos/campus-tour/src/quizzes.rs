//! The four question banks, one per quiz room.

use tour_engine::Question;

/// Electrical Engineering Lab: C programming basics.
pub fn electrical() -> Vec<Question> {
    vec![
        Question::new(
            "What is the correct syntax to print a message to the console in C?",
            [
                "print(\"Hello, World!\");",
                "printf(\"Hello, World!\");",
                "echo(\"Hello, World!\");",
                "cout << \"Hello, World!\";",
            ],
            1,
        ),
        Question::new(
            "Which of the following data types can store a single character in C?",
            ["int", "float", "char", "double"],
            2,
        ),
        Question::new(
            "What is the size of the int data type in C on most modern systems?",
            [
                "2 bytes",
                "4 bytes",
                "8 bytes",
                "It depends on the system/compiler",
            ],
            1,
        ),
        Question::new(
            "Which of the following operators is used to get the address of a variable in C?",
            ["*", "&", "->", "@"],
            1,
        ),
        Question::new(
            "Which of the following is a correct way to declare an array of 10 integers in C?",
            ["int arr[10];", "int[10] arr;", "array int[10];", "int[] arr(10);"],
            0,
        ),
    ]
}

pub fn physics() -> Vec<Question> {
    vec![
        Question::new(
            "What is Newton's First Law of Motion?",
            [
                "F = ma",
                "Objects at rest stay at rest unless acted upon by a force",
                "Every action has an equal and opposite reaction",
                "Energy is conserved in a closed system",
            ],
            1,
        ),
        Question::new(
            "What is the SI unit of force?",
            ["Joule", "Newton", "Watt", "Pascal"],
            1,
        ),
        Question::new(
            "What is the acceleration due to gravity on Earth (approximately)?",
            ["5.6 m/s²", "7.8 m/s²", "9.8 m/s²", "11.2 m/s²"],
            2,
        ),
        Question::new(
            "Which of the following is a vector quantity?",
            ["Mass", "Temperature", "Velocity", "Time"],
            2,
        ),
        Question::new(
            "What is the formula for kinetic energy?",
            ["KE = mgh", "KE = 1/2 * m * v^2", "KE = F * d", "KE = P * V"],
            1,
        ),
    ]
}

pub fn performing_arts() -> Vec<Question> {
    vec![
        Question::new(
            "Which of these is a classical dance form of India?",
            ["Salsa", "Bharatanatyam", "Ballet", "Tap dance"],
            1,
        ),
        Question::new(
            "What is the name of the classical Hindustani stringed instrument?",
            ["Tabla", "Flute", "Sitar", "Harmonium"],
            2,
        ),
        Question::new(
            "Which of these is a famous Carnatic music composer?",
            ["Tyagaraja", "Beethoven", "Mozart", "Bach"],
            0,
        ),
        Question::new(
            "What is the primary percussion instrument used in Hindustani classical music?",
            ["Violin", "Tabla", "Guitar", "Piano"],
            1,
        ),
        Question::new(
            "Which of these is a major form of Indian classical music?",
            ["Jazz", "Rock", "Carnatic", "Pop"],
            2,
        ),
    ]
}

pub fn sports() -> Vec<Question> {
    vec![
        Question::new(
            "What sport uses a bat and a ball with wickets?",
            ["Football", "Basketball", "Cricket", "Tennis"],
            2,
        ),
        Question::new(
            "In which sport do players score by shooting a ball through a hoop?",
            ["Football", "Basketball", "Cricket", "Volleyball"],
            1,
        ),
        Question::new(
            "What is the main objective in football (soccer)?",
            ["Hit wickets", "Score baskets", "Score goals", "Make home runs"],
            2,
        ),
        Question::new(
            "How many players are on a cricket team during a match?",
            ["9", "10", "11", "12"],
            2,
        ),
        Question::new(
            "What is the shape of a football (soccer) field?",
            ["Circle", "Triangle", "Square", "Rectangle"],
            3,
        ),
    ]
}
