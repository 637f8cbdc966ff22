/// Capabilities shared by every animal in the zoo.
///
/// Each method returns the line it would announce; callers decide where the
/// text goes.
pub trait Creature {
    fn name(&self) -> &str;
    fn age(&self) -> u32;

    fn make_sound(&self) -> String {
        format!("{} makes a generic animal sound.", self.name())
    }

    fn eat(&self) -> String;
}
