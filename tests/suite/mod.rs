mod onboarding;
mod render;
