// End-to-end tests for the generate-tts and bulk-generate-tts binaries
//
// The provider is replaced by a mockito server reached through
// ELEVENLABS_API_URL. Tenant trees live in temporary directories, so every
// test runs against its own filesystem and tests can run in parallel.
//
// On unix some orchestrator tests replace generate-tts with a shell script
// to control the client's exit code and observe the call order.

mod test_generate_tts;
