pub enum InputEvent {
    KeyEvent(KeyState, InputKey),
    Close,
}

pub enum KeyState {
    Up,
    Down,
}

pub enum InputKey {
    Left,
    Right,
    Up,
    Down,
}
