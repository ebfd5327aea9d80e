fn main() {
    powtarget::main();
}
