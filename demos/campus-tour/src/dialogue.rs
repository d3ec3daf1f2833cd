//! Everyone who talks on the campus.

use tour_engine::DialogueScript;

/// Receptionist at the labs-floor desk. Advances on interact only.
pub fn receptionist() -> DialogueScript {
    DialogueScript::new(
        "Rishabh",
        &[
            "Hi There!",
            "There are two labs on this floor.",
            "The first lab is the Engineering Exploration Lab, where you can explore various engineering concepts.",
            "The second lab is the Physics Lab, where you can conduct experiments and study physical phenomena.",
            "There's also a lift between the two labs at the top middle of the floor for easy access to other floors.",
        ],
    )
    .manual()
}

/// First-floor guide near the central marker. Auto-advances every 7 s,
/// replays after the 30 s cooldown.
pub fn floor_guide() -> DialogueScript {
    DialogueScript::new(
        "Guide",
        &[
            "Hi! On This floor there are 2 rooms.",
            "One is for Performing Arts. Here you will get to know about various musical instruments and our musical traditions.",
            "The Next is Artificial Intelligence Lab. Here You will understand more about the impact of AI in our lives and our future.",
            "This is a special Lab and I suggest you to visit it at the end.",
            "Thank You!",
        ],
    )
}

/// Ground-floor reception desk: a single greeting that shows while the
/// player stands at the desk.
pub fn welcome_desk() -> DialogueScript {
    DialogueScript::new(
        "Reception",
        &["Welcome To MMCOE!\nHow may I help you Today?"],
    )
    .manual()
}

/// The AI lab robot's farewell speech. Interact-driven, plays once.
pub fn ai_robot() -> DialogueScript {
    DialogueScript::new(
        "AI Robo",
        &[
            "Greetings, human! I'm AI Robo.",
            "What an incredible journey we've had through MMCOE!",
            "We've explored various labs and facilities.",
            "The future of AI is incredibly exciting and full of potential.",
            "For college students, AI offers amazing opportunities:",
            "1. Enhancing research capabilities",
            "2. Automating tedious tasks",
            "3. Providing personalized learning",
            "4. Opening new career paths",
            "Embrace AI, and shape the future!",
            "It's been a pleasure guiding you through MMCOE.",
            "I hope you've enjoyed the tour as much as I have.",
            "It's time for us to wrap up our journey now.",
            "Remember, the future is bright with AI!",
        ],
    )
    .manual()
    .no_replay()
}
