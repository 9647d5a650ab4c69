//! Static reference content for the workout plan and diet tabs.

pub const WORKOUT_PLAN: [(&str, &[&str]); 3] = [
    (
        "Warm-up",
        &[
            "5 min light jog or brisk walk",
            "Jumping jacks (30 sec)",
            "Arm circles & leg swings",
            "Dynamic hip openers",
        ],
    ),
    (
        "Workout",
        &[
            "Push-ups (3 x 12)",
            "Bodyweight squats (3 x 15)",
            "Plank hold (3 x 45 sec)",
            "Dumbbell rows (3 x 10 per arm)",
            "Walking lunges (3 x 12 per leg)",
        ],
    ),
    (
        "Cool-down",
        &[
            "Slow walk (3 min)",
            "Hamstring & quad stretches",
            "Child's pose (1 min)",
            "Deep breathing (2 min)",
        ],
    ),
];

pub const DIET_PLANS: [(&str, &[&str]); 3] = [
    (
        "Weight Loss",
        &[
            "Oatmeal with berries",
            "Grilled chicken salad",
            "Steamed vegetables & lentils",
            "Greek yogurt snack",
        ],
    ),
    (
        "Muscle Gain",
        &[
            "Eggs & whole-grain toast",
            "Chicken breast with rice",
            "Salmon & sweet potato",
            "Protein smoothie with peanut butter",
        ],
    ),
    (
        "Endurance",
        &[
            "Banana & almond butter",
            "Whole-wheat pasta with tomato sauce",
            "Quinoa bowl with beans",
            "Trail mix & fruit",
        ],
    ),
];
